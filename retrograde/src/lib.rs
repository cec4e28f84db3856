pub mod error;
pub mod frame;
pub mod math;
pub mod observation;
pub mod orbit;
pub mod playback;
pub mod prelude;
pub mod recording;
pub mod scenario;
pub mod trail;
