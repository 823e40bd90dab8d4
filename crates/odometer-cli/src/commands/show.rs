use anyhow::Result;

use odometer_core::{Counter, CounterConfig};

pub fn run(config: &CounterConfig, value: u64, classes: bool) -> Result<()> {
    let mut counter = Counter::from_config(config);
    counter.update(value);

    if classes {
        println!("{}", counter.class_name());
        for element in counter.elements() {
            println!("  {}", element.class_name());
        }
    } else {
        println!("{}", counter);
    }

    Ok(())
}
