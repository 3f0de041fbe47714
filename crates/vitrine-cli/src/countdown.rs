//! `countdown` command: flash-sale time remaining.

use chrono::Utc;
use vitrine_catalog::{flash_sale_end, tick_flash_sale, TimeRemaining};

fn print_remaining(remaining: TimeRemaining) {
    println!(
        "{}d {:02}h {:02}m {:02}s",
        remaining.days, remaining.hours, remaining.minutes, remaining.seconds
    );
}

/// Prints the time remaining in a flash sale that started now and runs for
/// `hours`. With `watch`, keeps printing once per second until the sale
/// ends.
pub(crate) async fn run_countdown(hours: u64, watch: bool) -> anyhow::Result<()> {
    let end = flash_sale_end(Utc::now(), hours);

    if watch {
        tick_flash_sale(end, print_remaining).await;
    } else {
        print_remaining(TimeRemaining::until(end, Utc::now()));
    }

    Ok(())
}
