use std::path::PathBuf;

use anyhow::Result;
use log::error;

#[tokio::main]
async fn main() -> Result<()> {
    remsync::init_logger();

    let mut args = std::env::args().skip(1);
    let csv_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => {
            println!("Error: Please provide the CSV filename as an argument.");
            println!("Usage: remsync <csv-file> [list-name]");
            std::process::exit(1);
        }
    };
    let list_name = args.next();

    match remsync::run(&csv_path, list_name.as_deref()).await {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("Sync failed: {:?}", e);
            Err(e)
        }
    }
}
