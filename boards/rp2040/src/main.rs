#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Timer;
use ledpad::{CounterDebouncer, LogSink, PadPolarity, ReferenceScanner};
use {defmt_rtt as _, panic_probe as _};

/// Time spent on each row. A full frame of the 2x4 pad takes two cycles.
const SCAN_CYCLE_US: u64 = 500;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Ledpad start!");
    let p = embassy_rp::init(Default::default());

    // Rows select on low and rest high, LED columns drive high and rest low
    let switch_rows = [Output::new(p.PIN_2, Level::High), Output::new(p.PIN_3, Level::High)];
    let led_rows = [Output::new(p.PIN_4, Level::High), Output::new(p.PIN_5, Level::High)];
    let switch_cols = [
        Input::new(p.PIN_6, Pull::Up),
        Input::new(p.PIN_7, Pull::Up),
        Input::new(p.PIN_8, Pull::Up),
        Input::new(p.PIN_9, Pull::Up),
    ];
    let led_cols = [
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
        Output::new(p.PIN_13, Level::Low),
    ];

    let mut scanner: ReferenceScanner<Input<'static>, Output<'static>> = ReferenceScanner::new(
        switch_rows,
        led_rows,
        switch_cols,
        led_cols,
        CounterDebouncer::new(),
        PadPolarity::REFERENCE,
    );
    scanner.init();

    let mut sink = LogSink;
    loop {
        scanner.scan_cycle(&mut sink);
        Timer::after_micros(SCAN_CYCLE_US).await;
    }
}
