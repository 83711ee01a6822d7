// Input dispatcher: turns one frame's batch of events into state changes.
// Never draws; the renderer picks up the new state on the same frame.

use crate::state::AppState;

/// Host-independent key identity. The window maps its raw keys onto this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Right,
    Left,
    Up,
    Escape,
    H,
    Q,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    CloseRequested,
    PointerReleased { x: i32, y: i32 },
    KeyPressed(KeyCode),
}

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    IncreaseSize,
    DecreaseSize,
    CycleColor,
    Reset,
    ToggleHelp,
    Quit,
}

/// A key binding, also used to build the help overlay.
#[derive(Debug, Clone, Copy)]
pub struct Shortcut {
    pub key: KeyCode,
    pub label: &'static str,
    pub command: Command,
    pub description: &'static str,
}

pub const SHORTCUTS: [Shortcut; 6] = [
    Shortcut { key: KeyCode::Right, label: "Right", command: Command::IncreaseSize, description: "bigger brush" },
    Shortcut { key: KeyCode::Left, label: "Left", command: Command::DecreaseSize, description: "smaller brush" },
    Shortcut { key: KeyCode::Up, label: "Up", command: Command::CycleColor, description: "next color" },
    Shortcut { key: KeyCode::Escape, label: "Esc", command: Command::Reset, description: "reset" },
    Shortcut { key: KeyCode::H, label: "H", command: Command::ToggleHelp, description: "toggle help" },
    Shortcut { key: KeyCode::Q, label: "Q", command: Command::Quit, description: "quit" },
];

impl Command {
    pub fn for_key(key: KeyCode) -> Option<Command> {
        SHORTCUTS.iter().find(|s| s.key == key).map(|s| s.command)
    }
}

/// Whether the event loop should keep going after a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Apply a batch in arrival order. A terminal event stops the batch.
pub fn dispatch(state: &mut AppState, events: &[InputEvent]) -> Control {
    for event in events {
        if apply(state, event) == Control::Quit {
            return Control::Quit;
        }
    }
    Control::Continue
}

fn apply(state: &mut AppState, event: &InputEvent) -> Control {
    match *event {
        InputEvent::CloseRequested => {
            log::info!("window close requested");
            Control::Quit
        }
        InputEvent::PointerReleased { x, y } => {
            let shape = state.place_shape(x, y);
            log::debug!(
                "placed shape #{} at ({x}, {y}) r={} color={:?}",
                state.shapes().len(),
                shape.radius(),
                shape.color()
            );
            Control::Continue
        }
        InputEvent::KeyPressed(key) => match Command::for_key(key) {
            Some(command) => run_command(state, command),
            None => {
                log::trace!("ignoring unbound key {key:?}");
                Control::Continue
            }
        },
    }
}

fn run_command(state: &mut AppState, command: Command) -> Control {
    match command {
        Command::IncreaseSize => state.grow_brush(),
        Command::DecreaseSize => state.shrink_brush(),
        Command::CycleColor => state.cycle_color(),
        Command::Reset => {
            state.reset();
            log::info!("reset: shapes cleared, brush back to r={}", state.brush_radius());
        }
        Command::ToggleHelp => state.toggle_help(),
        Command::Quit => {
            log::info!("quit key pressed");
            return Control::Quit;
        }
    }
    log::debug!(
        "{command:?}: r={} color={:?} help={}",
        state.brush_radius(),
        state.brush_color(),
        state.help_visible()
    );
    Control::Continue
}
