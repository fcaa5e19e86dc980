//! Auto-navigation timing

use std::time::Duration;

use carousel_core::{Carousel, CarouselOptions};
use carousel_dom::{Document, HtmlParser, UiEvent};

const PAGE: &str = r#"
<style>.carousel-windows { width: 200px }</style>
<div class="carousel" id="c">
  <button class="carousel-prev" id="prev">prev</button>
  <button class="carousel-next" id="next">next</button>
  <div class="carousel-windows">
    <div class="carousel-content" id="a"><a href="/a">a</a></div>
    <div class="carousel-content" id="b"><a href="/b">b</a></div>
    <div class="carousel-content" id="c3"><a href="/c">c</a></div>
  </div>
</div>
"#;

fn carousel(options: CarouselOptions) -> Carousel<Document> {
    let doc = HtmlParser::new().parse(PAGE).unwrap();
    let container = doc.get_element_by_id("c");
    Carousel::new(doc, container, options).unwrap()
}

fn ticks(carousel: &mut Carousel<Document>, n: usize) -> usize {
    (0..n).filter(|_| carousel.tick().unwrap()).count()
}

#[test]
fn test_plays_by_default() {
    let carousel = carousel(CarouselOptions::new());
    assert!(carousel.is_playing());
    assert!(carousel.config().allow_autonav);
    assert_eq!(carousel.current_delay(), 0);
}

#[test]
fn test_autonav_disabled() {
    let mut carousel = carousel(CarouselOptions::new().autonav(false));
    assert!(!carousel.is_playing());
    assert_eq!(ticks(&mut carousel, 10), 0);
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn test_advances_after_delay() {
    let mut carousel = carousel(CarouselOptions::new().autonav_delay(3000));

    assert!(!carousel.tick().unwrap());
    assert!(!carousel.tick().unwrap());
    assert_eq!(carousel.current_delay(), 2000);
    assert!(carousel.tick().unwrap());
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.current_delay(), 0);

    // Keeps cycling, wrapping at the end
    assert_eq!(ticks(&mut carousel, 6), 2);
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn test_manual_navigation_resets_delay() {
    let mut carousel = carousel(CarouselOptions::new().autonav_delay(3000));
    ticks(&mut carousel, 2);
    assert_eq!(carousel.current_delay(), 2000);

    let next = carousel.dom().get_element_by_id("next").unwrap();
    assert!(carousel.handle_event(&mut UiEvent::click(next)).unwrap());
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.current_delay(), 0);

    assert_eq!(ticks(&mut carousel, 2), 0);
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_stop_ignores_ticks() {
    let mut carousel = carousel(CarouselOptions::new().autonav_delay(1000));
    carousel.stop();
    assert!(!carousel.is_playing());
    assert_eq!(ticks(&mut carousel, 5), 0);
    assert_eq!(carousel.current_index(), 0);

    carousel.play();
    assert!(carousel.is_playing());
    assert!(carousel.tick().unwrap());
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_play_when_configured_off() {
    let mut carousel = carousel(CarouselOptions::new().autonav(false).autonav_delay(1000));
    carousel.play();
    assert!(carousel.tick().unwrap());
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_real_ticker_drives_navigation() {
    let mut carousel = carousel(CarouselOptions::new().autonav_delay(20).tick_interval(10));

    smol::block_on(async {
        let deadline = Duration::from_secs(5);
        let started = std::time::Instant::now();
        while carousel.current_index() == 0 && started.elapsed() < deadline {
            if carousel.next_tick().await.is_some() {
                carousel.tick().unwrap();
            }
        }
    });
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_stopped_ticker_goes_quiet() {
    let mut carousel = carousel(CarouselOptions::new().tick_interval(5));
    carousel.stop();
    let rx = carousel.ticks();

    smol::block_on(smol::Timer::after(Duration::from_millis(30)));
    // At most one tick was queued before cancellation
    let mut queued = 0;
    while rx.try_recv().is_ok() {
        queued += 1;
    }
    assert!(queued <= 1);
    smol::block_on(smol::Timer::after(Duration::from_millis(30)));
    assert!(rx.try_recv().is_err());
}
