mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
pub use view::{ordinal, CountColour, CounterView};
