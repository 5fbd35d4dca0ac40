#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::uart::{Config as UartConfig, UartTx};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker, Timer};
use portable_atomic::{AtomicU32, Ordering};
use static_cell::StaticCell;
use switch_reporter::config::{BAUD_RATE, LED_FLASH_MS, REPORTER, TICK_HZ};
use switch_reporter::{
    BoardInputs, Button, Debouncer, DispatchState, Reporter, UartTransmitter,
};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

/// Accepted presses, for the LED task. Latest value wins: a press that
/// arrives while the LED is still lit just restarts the flash.
static PRESS_SIGNAL: StaticCell<Signal<CriticalSectionRawMutex, Button>> = StaticCell::new();

/// Presses accepted since power-up.
static PRESS_COUNT: AtomicU32 = AtomicU32::new(0);

type BoardReporter = Reporter<Debouncer, UartTransmitter<'static>>;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Switch reporter starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    let signal = PRESS_SIGNAL.init(Signal::new());

    // --- UART Setup (TX only) ---
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = BAUD_RATE;
    let tx = UartTx::new_blocking(p.UART0, p.PIN_0, uart_config);

    // --- Inputs ---
    let buttons = [
        Input::new(p.PIN_2, Pull::Up),
        Input::new(p.PIN_3, Pull::Up),
        Input::new(p.PIN_4, Pull::Up),
        Input::new(p.PIN_5, Pull::Up),
        Input::new(p.PIN_22, Pull::Up),
    ];
    let switches = [
        Input::new(p.PIN_6, Pull::Up),
        Input::new(p.PIN_7, Pull::Up),
        Input::new(p.PIN_8, Pull::Up),
        Input::new(p.PIN_9, Pull::Up),
        Input::new(p.PIN_10, Pull::Up),
        Input::new(p.PIN_11, Pull::Up),
        Input::new(p.PIN_12, Pull::Up),
        Input::new(p.PIN_13, Pull::Up),
        Input::new(p.PIN_14, Pull::Up),
        Input::new(p.PIN_15, Pull::Up),
        Input::new(p.PIN_16, Pull::Up),
        Input::new(p.PIN_17, Pull::Up),
        Input::new(p.PIN_18, Pull::Up),
        Input::new(p.PIN_19, Pull::Up),
        Input::new(p.PIN_20, Pull::Up),
        Input::new(p.PIN_21, Pull::Up),
    ];
    let inputs = BoardInputs::new(buttons, switches);

    let reporter = Reporter::new(
        &REPORTER,
        Debouncer::new(REPORTER.debounce_ticks),
        UartTransmitter::new(tx),
    );

    let led = Output::new(p.PIN_25, Level::Low);

    spawner.spawn(reporter_task(reporter, inputs, signal).unwrap());
    spawner.spawn(led_task(led, signal).unwrap());

    info!("Switch reporter initialized at {} Hz, {} baud", TICK_HZ, BAUD_RATE);
}

/// Reporter task - samples the inputs and runs one reporter tick per period.
#[embassy_executor::task]
async fn reporter_task(
    mut reporter: BoardReporter,
    mut inputs: BoardInputs<Input<'static>>,
    signal: &'static Signal<CriticalSectionRawMutex, Button>,
) {
    let mut ticker = Ticker::every(Duration::from_hz(u64::from(TICK_HZ)));
    loop {
        let before = reporter.state();
        let report = reporter.tick(&inputs.sample());

        // A press is accepted on the tick that leaves WaitForPress for a
        // button message; presses while busy are ignored by the dispatcher.
        if before == DispatchState::WaitForPress
            && reporter.state() == DispatchState::LoadButtonMessage
        {
            if let Some(trigger) = reporter.dispatcher().trigger() {
                let count = PRESS_COUNT.fetch_add(1, Ordering::Relaxed) + 1;
                #[cfg(feature = "log-presses")]
                info!(
                    "press #{}: {:?}, switches {=u16:#06x}",
                    count,
                    trigger.button,
                    trigger.value
                );
                #[cfg(not(feature = "log-presses"))]
                defmt::debug!("press #{}: {:?}", count, trigger.button);
                signal.signal(trigger.button);
            }
        } else if !report.presses.is_empty() && before != DispatchState::WaitForPress {
            defmt::trace!("press {:?} ignored in {:?}", report.presses, before);
        }

        ticker.next().await;
    }
}

/// LED task - flashes the LED for each accepted press.
#[embassy_executor::task]
async fn led_task(
    mut led: Output<'static>,
    signal: &'static Signal<CriticalSectionRawMutex, Button>,
) {
    loop {
        let button = signal.wait().await;
        defmt::debug!("flash for {:?}", button);
        led.set_high();
        Timer::after_millis(LED_FLASH_MS).await;
        led.set_low();
    }
}
