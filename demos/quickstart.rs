//! Builds a small dispatch table, encodes a `RelayCommand` frame on the
//! wire, and runs it back through the table to reach an installed
//! handler closure. Run with `cargo run --example quickstart`.
use j1939_relay_bus::protocol::messages::{NodeInfo, RelayCommand};
use j1939_relay_bus::{AddressFilter, CanFrame, Dispatcher};

fn main() {
    let mut relay_events = 0u32;
    let mut on_relay = |on: bool| {
        relay_events += 1;
        println!("relay command: on={on}");
    };

    let mut relay = RelayCommand::new();
    relay.set_handler(Some(&mut on_relay));

    let mut on_node_info = |fields: j1939_relay_bus::protocol::messages::NodeInfoFields| {
        println!("node announced: {fields:?}");
    };
    let mut node_info = NodeInfo::new();
    node_info.set_handler(Some(&mut on_node_info));

    let mut dispatcher: Dispatcher<8> = Dispatcher::new();
    dispatcher
        .register(&mut relay, AddressFilter::Exact(0x10), AddressFilter::Exact(0x81))
        .expect("dispatch table has room");
    dispatcher
        .register(&mut node_info, AddressFilter::Any, AddressFilter::Any)
        .expect("dispatch table has room");

    let mut frame = CanFrame::empty();
    RelayCommand::prepare(&mut frame, 0x10, 0x81);
    RelayCommand::encode_on(&mut frame, true);

    if !dispatcher.process_frame(&frame) {
        println!("no descriptor matched the incoming frame");
    }

    println!("relay handler ran {relay_events} time(s)");
}
