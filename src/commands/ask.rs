//! Ask command handler

use std::path::Path;

use anyhow::Result;

use heroline::faq::Responder;

use super::load_config;

/// Answer a question about the banner's owner.
#[cfg(not(tarpaulin_include))]
pub fn handle(config_path: Option<&Path>, question: &[String]) -> Result<()> {
    let config = load_config(config_path)?;
    let responder = Responder::builtin(config.faq.owner);
    println!("{}", responder.respond(&question.join(" ")));
    Ok(())
}
