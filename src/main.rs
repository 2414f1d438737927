// Entrypoint for the CLI application.
// - Keeps `main` small: create an API client and hand it to the UI loop.
// - Returns `anyhow::Result` to simplify error handling at the top level.

use gutendex_cli::{api::ApiClient, ui::main_menu};

fn main() -> anyhow::Result<()> {
    let api = ApiClient::new()?;

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(api)?;
    Ok(())
}
