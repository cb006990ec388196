//! `ray-demo hello` — le second programme émis : un module utilitaire qui
//! fournit un message, un autre qui l’affiche.

use std::io::Write;

use anyhow::Result;
use ray_runtime::Console;

mod utils {
    pub fn message() -> &'static str {
        "hello from utils"
    }
}

fn print_message<W: Write>(console: &mut Console<W>, msg: &str) {
    console.println(msg);
}

pub fn exec<W: Write>(console: &mut Console<W>) -> Result<()> {
    print_message(console, "hello world");
    print_message(console, utils::message());
    Ok(())
}
