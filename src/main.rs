use site_squeeze::logger::set_quiet_mode;
use site_squeeze::{collect_config, pipeline};

#[tokio::main]
async fn main() {
    let config = match collect_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            println!("Done.");
            return;
        }
    };

    set_quiet_mode(!config.show_log);

    // Single error barrier: failures are reported through the (possibly
    // quiet) log and never change the exit status.
    if let Err(e) = pipeline::run(&config).await {
        site_squeeze::error!("{}", e);
    }

    println!("Done.");
}
