//! Scripted drags against a headless sheet.
//!
//! Usage: `sheet-demo [viewport-height]`. Set `RUST_LOG=debug` to see every
//! style write.

mod host;

use anyhow::{ensure, Context, Result};
use host::LoggingHost;
use sheetkit_core::{Clock, ManualClock, Throttled};
use sheetkit_foundation::{Point, PointerDispatcher, PointerEvent, PointerEventKind};
use sheetkit_ui::{BottomSheet, SheetAction, SheetConfig, SheetHost};

const DEFAULT_VIEWPORT_HEIGHT: f32 = 800.0;
const FRAME_MS: u64 = 16;
const MAX_SETTLE_FRAMES: u32 = 120;
const REPORT_INTERVAL_MS: u64 = 100;

struct Scenario {
    name: &'static str,
    starts_open: bool,
    /// Signed drag distance as a fraction of the viewport height.
    distance_fraction: f32,
    /// px/s
    speed: f32,
    expected: SheetAction,
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "short slow drag",
        starts_open: true,
        distance_fraction: 0.25,
        speed: 200.0,
        expected: SheetAction::SnapBack,
    },
    Scenario {
        name: "drag past halfway",
        starts_open: true,
        distance_fraction: 0.6,
        speed: 300.0,
        expected: SheetAction::Close,
    },
    Scenario {
        name: "downward flick",
        starts_open: true,
        distance_fraction: 0.1,
        speed: 1500.0,
        expected: SheetAction::Close,
    },
    Scenario {
        name: "upward flick",
        starts_open: false,
        distance_fraction: -0.1,
        speed: 1500.0,
        expected: SheetAction::Reopen,
    },
    Scenario {
        name: "slow upward drag",
        starts_open: true,
        distance_fraction: -0.3,
        speed: 200.0,
        expected: SheetAction::SnapBack,
    },
];

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let viewport_height = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<f32>()
            .with_context(|| format!("invalid viewport height {arg:?}"))?,
        None => DEFAULT_VIEWPORT_HEIGHT,
    };
    ensure!(
        viewport_height.is_finite() && viewport_height > 0.0,
        "viewport height must be positive, got {viewport_height}"
    );

    println!("=== SheetKit Headless Demo ===");
    println!("Viewport height: {viewport_height}px");

    for scenario in SCENARIOS {
        run_scenario(scenario, viewport_height)?;
    }
    run_programmatic_toggle(viewport_height)?;

    println!("All scenarios behaved as expected.");
    Ok(())
}

fn run_scenario(scenario: &Scenario, viewport_height: f32) -> Result<()> {
    println!("\n--- {} ---", scenario.name);

    let clock = ManualClock::new(0);
    let host = LoggingHost::new(clock.clone(), viewport_height, scenario.starts_open);
    let mut sheet = BottomSheet::with_config(host, SheetConfig::default());
    let mut dispatcher = PointerDispatcher::new();
    let mut actions = Vec::new();
    let mut report = Throttled::with_clock(
        |(now, offset): (u64, f32)| println!("  t={now:>5}ms offset={offset:>8.1}px"),
        REPORT_INTERVAL_MS,
        clock.clone(),
    );

    let distance = viewport_height * scenario.distance_fraction;
    let duration_ms = (distance.abs() / scenario.speed * 1000.0).ceil() as u64;
    let frames = duration_ms.div_ceil(FRAME_MS).max(1);
    let from_y = viewport_height * 0.5;

    dispatcher.push(pointer(PointerEventKind::Down, from_y, &clock));
    for frame in 1..=frames {
        clock.advance(FRAME_MS);
        let y = from_y + distance * frame as f32 / frames as f32;
        dispatcher.push(pointer(PointerEventKind::Move, y, &clock));
        pump(&mut dispatcher, &mut sheet, &mut actions);
        report.call((clock.now_millis(), sheet.host().visible_offset()));
    }
    dispatcher.push(pointer(PointerEventKind::Up, from_y + distance, &clock));
    pump(&mut dispatcher, &mut sheet, &mut actions);

    for _ in 0..MAX_SETTLE_FRAMES {
        sheet.advance_to(clock.now_millis());
        report.call((clock.now_millis(), sheet.host().visible_offset()));
        if sheet.next_deadline().is_none() && sheet.host().is_settled() {
            break;
        }
        clock.advance(FRAME_MS);
    }
    report.reset();
    report.call((clock.now_millis(), sheet.host().visible_offset()));

    println!(
        "  decision={:?} open={} scroll_locked={}",
        actions,
        sheet.host().is_open(),
        sheet.host().scroll_locked()
    );
    ensure!(
        actions == [scenario.expected],
        "{}: expected {:?}, got {:?}",
        scenario.name,
        scenario.expected,
        actions
    );
    Ok(())
}

fn run_programmatic_toggle(viewport_height: f32) -> Result<()> {
    println!("\n--- programmatic open/close ---");

    let clock = ManualClock::new(0);
    let host = LoggingHost::new(clock, viewport_height, false);
    let mut sheet = BottomSheet::new(host);

    sheet.set_open(true);
    ensure!(sheet.host().scroll_locked(), "opening should lock scrolling");
    sheet.set_open(false);
    ensure!(!sheet.host().scroll_locked(), "closing should unlock scrolling");

    println!("  open/close side effects applied");
    Ok(())
}

fn pointer(kind: PointerEventKind, y: f32, clock: &ManualClock) -> PointerEvent {
    PointerEvent::new(kind, Point::new(0.0, y), clock.now_millis())
}

fn pump(
    dispatcher: &mut PointerDispatcher,
    sheet: &mut BottomSheet<LoggingHost>,
    actions: &mut Vec<SheetAction>,
) {
    dispatcher.drain(|event| actions.extend(sheet.on_pointer_event(&event)));
}
