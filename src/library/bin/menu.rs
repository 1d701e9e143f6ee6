use std::error::Error;
use std::io;
use std::sync::Arc;
use lbms::core::domain::Configuration;
use lbms::library::domain::LibraryService;
use lbms::library::factory::create_library_service;
use lbms::library::menu::LibraryMenu;
use lbms::utils::ddb::setup_console_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    setup_console_tracing();

    let config = Configuration::from_env();
    let service: Arc<dyn LibraryService> = Arc::from(create_library_service(&config, config.store).await);
    let menu = LibraryMenu::new(service);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    menu.run(&mut input, &mut output).await?;
    Ok(())
}
