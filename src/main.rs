//! Runs the segment clock on a Linux single-board computer.
//!
//! Configuration comes from the environment (see [`segment_clock::Config`]); there are no
//! command-line flags. Press Ctrl-C to blank the display and exit.

use embassy_executor::Spawner;
use linux_embedded_hal::I2cdev;
use log::{error, info, warn};
use segment_clock::input::{gpio, keyboard};
use segment_clock::{
    Config, Controller, ControllerOptions, EVENTS, Error, EventSender, Ht16k33, NmcliNetwork,
    Result, SHUTDOWN, SegmentDisplay, SettingsStore, SystemZoneClock,
};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let code = match inner_main(spawner).await {
        Ok(()) => 0,
        Err(err) => {
            error!("{err}");
            1
        }
    };
    std::process::exit(code);
}

async fn inner_main(_spawner: Spawner) -> Result<()> {
    let config = Config::from_env()?;
    info!("{config:?}");

    let store = SettingsStore::new(&config.settings_path);
    let settings = store.load();

    let i2c = I2cdev::new(&config.i2c_bus)
        .map_err(|err| Error::BusOpen(format!("{}: {err}", config.i2c_bus.display())))?;
    let display = SegmentDisplay::new(
        Ht16k33::new(i2c, config.i2c_address),
        config.geometry,
        config.scroll_delay,
        settings.brightness,
    )?;

    start_inputs(&config)?;
    ctrlc::set_handler(|| SHUTDOWN.signal(()))?;

    let mut controller = Controller::new(
        display,
        store,
        settings,
        NmcliNetwork::new(config.wifi_interface.clone()),
        SystemZoneClock,
        ControllerOptions::from(&config),
    );
    info!("Clock running");
    controller.run(&EVENTS, &SHUTDOWN).await;
    Ok(())
}

/// Start the GPIO panel and/or keyboard reader. The keyboard takes over if the panel fails.
fn start_inputs(config: &Config) -> Result<()> {
    let sender = EventSender::new(&EVENTS);
    let mut keyboard = config.keyboard;

    if config.gpio {
        match gpio::open(config) {
            Ok(panel) => {
                gpio::spawn(panel, sender)?;
            }
            Err(err) => {
                warn!("Encoder panel unavailable ({err}); using the keyboard");
                keyboard = true;
            }
        }
    }
    if keyboard {
        keyboard::spawn(sender)?;
    }
    Ok(())
}
