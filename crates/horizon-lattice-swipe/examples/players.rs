//! Player list with swipe actions.
//!
//! Players older than 29 offer three actions (archive, transfer, release);
//! the rest offer two (transfer, release). Release is the primary action, so
//! a long swipe releases a player. The pointer input is scripted.
//!
//! Run with: cargo run -p horizon-lattice-swipe --example players
//!
//! Set `RUST_LOG=horizon_lattice_swipe=trace` to follow the state machine.

use std::time::{Duration, Instant};

use glam::Vec2;
use horizon_lattice_swipe::prelude::*;
use horizon_lattice_swipe::{ColorRef, DimenRef, IconRef, StringRef};
use tracing_subscriber::EnvFilter;

const ROW_WIDTH: f32 = 360.0;
const FRAME: Duration = Duration::from_millis(16);

const ARCHIVE: SwipeAction = SwipeAction {
    background_color: ColorRef(0x607d8b),
    text_color: ColorRef(0xffffff),
    text_size: DimenRef(14),
    text: StringRef(1),
    icon: IconRef(1),
};

const TRANSFER: SwipeAction = SwipeAction {
    background_color: ColorRef(0x1e88e5),
    text_color: ColorRef(0xffffff),
    text_size: DimenRef(14),
    text: StringRef(2),
    icon: IconRef(2),
};

const RELEASE: SwipeAction = SwipeAction {
    background_color: ColorRef(0xe53935),
    text_color: ColorRef(0xffffff),
    text_size: DimenRef(14),
    text: StringRef(3),
    icon: IconRef(3),
};

fn label(action: &SwipeAction) -> &'static str {
    match action.text.0 {
        1 => "archive",
        2 => "transfer",
        3 => "release",
        _ => "unknown",
    }
}

struct Player {
    name: &'static str,
    age: u32,
}

struct Squad {
    players: Vec<Player>,
}

impl SwipeActionProvider for Squad {
    fn actions(&self, position: usize) -> ActionList {
        match self.players.get(position) {
            Some(player) if player.age > 29 => ActionList::from(vec![ARCHIVE, TRANSFER, RELEASE]),
            Some(_) => ActionList::from(vec![TRANSFER, RELEASE]),
            None => ActionList::new(),
        }
    }
}

impl SwipeAdapter for Squad {
    fn item_count(&self) -> usize {
        self.players.len()
    }
}

struct Console;

impl OnSwipeActionLaunchedListener for Console {
    fn on_swipe_action_launched(
        &mut self,
        ctx: &mut SwipeContext,
        position: usize,
        action: &SwipeAction,
    ) {
        println!("row {position}: {}", label(action));
        ctx.reset_swiped_view(position);
    }

    fn on_item_clicked(&mut self, _ctx: &mut SwipeContext, position: usize) {
        println!("row {position}: clicked");
    }

    fn on_item_long_clicked(&mut self, _ctx: &mut SwipeContext, position: usize) {
        println!("row {position}: long clicked");
    }
}

impl OnSwipeStateChangedListener for Console {
    fn on_swipe_started(&mut self, _ctx: &mut SwipeContext, position: usize) {
        println!("row {position}: swipe started");
    }

    fn on_swipe_ended(&mut self, _ctx: &mut SwipeContext, position: usize) {
        println!("row {position}: swipe ended");
    }
}

/// Replays a drag from `from_x` to `to_x` on `row`, one frame per step.
fn drag(
    callback: &mut SwipeCallback<RowList, Squad>,
    clock: &mut Instant,
    row: usize,
    from_x: f32,
    to_x: f32,
) {
    let mut send = |callback: &mut SwipeCallback<RowList, Squad>, phase, x: f32| {
        *clock += FRAME;
        callback.on_pointer_event(&PointerEvent::new(phase, Some(row), Vec2::new(x, 24.0), *clock));
        callback.advance(FRAME);
    };

    send(callback, PointerPhase::Down, from_x);
    let steps = 8;
    for step in 1..=steps {
        let x = from_x + (to_x - from_x) * step as f32 / steps as f32;
        send(callback, PointerPhase::Move, x);
    }
    send(callback, PointerPhase::Up, to_x);
}

fn tap(callback: &mut SwipeCallback<RowList, Squad>, clock: &mut Instant, row: usize, x: f32) {
    for phase in [PointerPhase::Down, PointerPhase::Up] {
        *clock += FRAME;
        callback.on_pointer_event(&PointerEvent::new(phase, Some(row), Vec2::new(x, 24.0), *clock));
    }
}

fn settle(callback: &mut SwipeCallback<RowList, Squad>) {
    for _ in 0..30 {
        callback.advance(FRAME);
    }
}

fn main() -> horizon_lattice_swipe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let squad = Squad {
        players: vec![
            Player { name: "Ortega", age: 33 },
            Player { name: "Lindqvist", age: 24 },
            Player { name: "Mbeki", age: 31 },
            Player { name: "Sato", age: 19 },
        ],
    };
    for (position, player) in squad.players.iter().enumerate() {
        println!(
            "{position}: {} ({}), {} actions",
            player.name,
            player.age,
            squad.actions(position).len()
        );
    }

    let mut callback = SwipeCallback::builder()
        .list_view(RowList::new(ROW_WIDTH))
        .adapter(squad)
        .on_swipe_action_launched_listener(Console)
        .on_swipe_state_changed_listener(Console)
        .config(SwipeConfig::new().button_width(72.0))
        .build()?;

    let mut clock = Instant::now();

    println!("-- short swipe on row 0, then tap its first button");
    drag(&mut callback, &mut clock, 0, 340.0, 200.0);
    settle(&mut callback);
    tap(&mut callback, &mut clock, 0, ROW_WIDTH - 3.0 * 72.0 + 10.0);
    settle(&mut callback);

    println!("-- long swipe on row 1");
    drag(&mut callback, &mut clock, 1, 350.0, 40.0);
    settle(&mut callback);

    println!("-- open row 2, then swipe row 3");
    drag(&mut callback, &mut clock, 2, 340.0, 220.0);
    settle(&mut callback);
    drag(&mut callback, &mut clock, 3, 340.0, 250.0);
    settle(&mut callback);

    println!("-- tap elsewhere closes row 3, then a plain click");
    tap(&mut callback, &mut clock, 0, 20.0);
    settle(&mut callback);
    tap(&mut callback, &mut clock, 0, 20.0);

    Ok(())
}
