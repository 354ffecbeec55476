// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Application entry point.

mod app;
mod config;
mod constant;
mod i18n;

use std::path::PathBuf;

use clap::Parser;
use cosmic::iced::Size;

use crate::app::{Flags, GlimpseApp};
use crate::constant::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// Directory to browse on startup.
    pub directory: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .with_module_level("glimpse", log::LevelFilter::Info)
        .init()?;

    let args = Args::parse();

    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();
    i18n::init(&requested_languages);

    let settings = cosmic::app::Settings::default().size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT));

    cosmic::app::run::<GlimpseApp>(settings, Flags::Args(args))?;
    Ok(())
}
