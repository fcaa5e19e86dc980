//! fOS Carousel demo
//!
//! Usage: `carousel-demo <page.html> [options.json] [script]`
//!
//! Loads the page, binds a carousel to its first `.carousel` element and
//! runs commands from the script (or stdin).

mod script;

use std::fs;
use std::io::{self, BufRead, BufReader};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use carousel_core::{Carousel, CarouselOptions};
use carousel_dom::{Document, DomAdapter, HtmlParser, UiEvent};
use smol::future::FutureExt;
use tracing_subscriber::EnvFilter;

use crate::script::Command;

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = std::env::args().skip(1);
    let Some(page) = args.next() else {
        bail!("usage: carousel-demo <page.html> [options.json] [script]");
    };
    let options = match args.next() {
        Some(path) => load_options(&path)?,
        None => CarouselOptions::default(),
    };
    let script: Box<dyn BufRead> = match args.next() {
        Some(path) => Box::new(BufReader::new(
            fs::File::open(&path).with_context(|| format!("opening script {path}"))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let html = fs::read_to_string(&page).with_context(|| format!("reading {page}"))?;
    let doc = HtmlParser::new()
        .parse_with_url(&html, &format!("file://{page}"))
        .context("parsing page")?;
    tracing::info!("Loaded {} ({} style rules)", doc.url(), doc.stylesheet().len());
    let container = doc.query(".carousel")?;
    let mut carousel = Carousel::new(doc, container, options).context("building carousel")?;
    report(&carousel);

    for (lineno, line) in script.lines().enumerate() {
        let line = line.context("reading script")?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!("line {}: {:#}", lineno + 1, e);
                continue;
            }
        };
        tracing::debug!("> {:?}", command);
        if let Err(e) = run(&mut carousel, command) {
            tracing::warn!("line {}: {:#}", lineno + 1, e);
        }
    }

    carousel.into_dom();
    Ok(())
}

fn load_options(path: &str) -> Result<CarouselOptions> {
    let text = fs::read_to_string(path).with_context(|| format!("reading options {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing options {path}"))
}

fn run(carousel: &mut Carousel<Document>, command: Command) -> Result<()> {
    match command {
        Command::Next => carousel.next()?,
        Command::Prev => carousel.previous()?,
        Command::Tab(index) => carousel.activate_panel(index)?,
        Command::Click(selector) => {
            let target = find(carousel, &selector)?;
            if !carousel.handle_event(&mut UiEvent::click(target))? {
                tracing::info!("click on {} ignored", selector);
            }
        }
        Command::Key(input) => {
            let target = carousel.dom().active_element().unwrap_or(carousel.container());
            let mut event = UiEvent::key_down(target, input);
            let handled = carousel.handle_event(&mut event)?;
            tracing::info!(
                "key handled={} default_prevented={}",
                handled,
                event.is_default_prevented()
            );
        }
        Command::Focus(selector) => {
            let target = find(carousel, &selector)?;
            carousel.dom_mut().focus(target);
        }
        Command::Tick(n) => {
            for _ in 0..n {
                carousel.tick()?;
            }
        }
        Command::Play => carousel.play(),
        Command::Stop => carousel.stop(),
        Command::Wait(duration) => wait(carousel, duration)?,
        Command::State => {
            report(carousel);
            return Ok(());
        }
    }
    report(carousel);
    Ok(())
}

fn find(carousel: &Carousel<Document>, selector: &str) -> Result<carousel_dom::NodeId> {
    carousel
        .dom()
        .query(selector)?
        .with_context(|| format!("no element matches `{selector}`"))
}

/// Feed real ticker ticks into the carousel until `duration` passes
fn wait(carousel: &mut Carousel<Document>, duration: Duration) -> Result<()> {
    let deadline = Instant::now() + duration;
    let ticks = carousel.ticks();

    smol::block_on(async {
        loop {
            let tick = async { ticks.recv().await.ok() };
            let timeout = async {
                smol::Timer::at(deadline).await;
                None
            };
            match tick.or(timeout).await {
                Some(_) => {
                    if carousel.tick()? {
                        report(carousel);
                    }
                }
                None => return Ok::<(), anyhow::Error>(()),
            }
        }
    })
}

fn report(carousel: &Carousel<Document>) {
    let dom = carousel.dom();
    let hidden: Vec<String> = carousel
        .panels()
        .iter()
        .map(|&p| dom.attribute(p, "aria-hidden").unwrap_or_default())
        .collect();
    let lefts: Vec<String> = carousel
        .panels()
        .iter()
        .map(|&p| dom.style(p, "left").unwrap_or_default())
        .collect();

    tracing::info!(
        "panel {}/{} playing={} idle={}ms aria-hidden={:?} left={:?}",
        carousel.current_index(),
        carousel.max_index(),
        carousel.is_playing(),
        carousel.current_delay(),
        hidden,
        lefts
    );
}
