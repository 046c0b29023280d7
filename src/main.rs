use anyhow::Context;
use cat_meter::{host::Deadline, host::Port, monitor, Cat, Config, Error, Meters};
use std::process;
use std::thread;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::default();

    let port = Port::open(&config).with_context(|| format!("failed to open {}", config.port))?;
    let mut cat = Cat::new(port, Deadline::new(), config.timeout);

    match cat.identify(config.model) {
        Ok(()) => {}
        Err(Error::ModelMismatch(model)) => {
            println!(
                "Expecting FT-891 (ID{}), but got different model ID string: {}",
                config.model, model
            );
            println!("This program was never tested on radios other than FT-891.");
            println!("Refusing to continue. Change `Config::model` if you want to proceed.");
            drop(cat.free());
            process::exit(1);
        }
        Err(error) => return Err(error).context("failed to identify transceiver"),
    }

    let meters = Meters::new();

    loop {
        let snapshot = monitor::poll(&mut cat, &meters)?;
        println!("{}", snapshot);

        thread::sleep(config.poll_interval);
    }
}
