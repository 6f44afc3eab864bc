/*
 *  main.rs
 *
 *  dottime - the time, one dot at a time
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use std::io::IsTerminal;

use anyhow::Result;
use chrono::Local;
use env_logger::Env;
use log::{debug, info};

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

use dottime::clock::ClockController;
use dottime::config;
use dottime::draw::render_grid;
use dottime::framebuf::PixelBuffer;
use dottime::layout::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use dottime::pacer::TickPacer;
use dottime::sample::TimeSample;
use dottime::term::TermRenderer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cfg = config::load()?;

    let level = cfg.log_level.clone().unwrap_or_else(|| "info".to_string());
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let use_24h = cfg.use_24h();
    info!(
        "dottime starting: {} display, {}x{} face",
        if use_24h { "24-hour" } else { "12-hour" },
        DISPLAY_WIDTH,
        DISPLAY_HEIGHT
    );

    let mut controller = ClockController::new();
    // No phone link on a desktop; the link dot reports whether the
    // renderer has a live terminal to talk to.
    controller.on_connection_changed(std::io::stdout().is_terminal());

    let mut fb = PixelBuffer::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);
    let mut term = TermRenderer::stdout();
    let mut pacer = TickPacer::aligned_to_wall_second();

    #[cfg(unix)]
    let (mut sigint, mut sigterm, mut sighup) = (
        signal(SignalKind::interrupt())?,
        signal(SignalKind::terminate())?,
        signal(SignalKind::hangup())?,
    );

    // First frame immediately; waiting out the alignment sleep would show
    // a blank face for up to a second.
    tick(&mut controller, &mut fb, &mut term, use_24h)?;

    loop {
        #[cfg(unix)]
        {
            tokio::select! {
                _ = tokio::time::sleep(pacer.time_until_tick()) => {
                    if pacer.should_tick() {
                        tick(&mut controller, &mut fb, &mut term, use_24h)?;
                    }
                }
                _ = sigint.recv() => { info!("SIGINT, shutting down"); break; }
                _ = sigterm.recv() => { info!("SIGTERM, shutting down"); break; }
                _ = sighup.recv() => { info!("SIGHUP, shutting down"); break; }
            }
        }
        #[cfg(not(unix))]
        {
            tokio::select! {
                _ = tokio::time::sleep(pacer.time_until_tick()) => {
                    if pacer.should_tick() {
                        tick(&mut controller, &mut fb, &mut term, use_24h)?;
                    }
                }
                _ = tokio::signal::ctrl_c() => { info!("ctrl-c, shutting down"); break; }
            }
        }
    }

    Ok(())
}

/// One encode-and-render pass.
fn tick(
    controller: &mut ClockController,
    fb: &mut PixelBuffer,
    term: &mut TermRenderer<std::io::Stdout>,
    use_24h: bool,
) -> Result<()> {
    let now = Local::now();
    let sample = TimeSample::from_datetime(&now, use_24h);
    debug!("tick {}", now.format("%H:%M:%S"));

    controller.on_tick(sample);

    fb.clear_off();
    render_grid(fb, &controller.display_grid())?;
    term.draw(fb)?;
    Ok(())
}
