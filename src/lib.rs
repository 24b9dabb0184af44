pub mod configuration;
pub mod error;
pub mod naming;
pub mod parser;
pub mod trajectory;
pub mod visualization;

pub use error::{ParseError, StoreError};

pub use parser::reader::{load_run, parse_run};
pub use parser::section::{Section, SectionCursors};

pub use trajectory::header::SimulationHeader;
pub use trajectory::series::{NVec3, RawSeries};
pub use trajectory::store::TrajectoryStore;

pub use naming::resolver::{resolve_styles, BodyStyle, PLANET_NAMES};

pub use configuration::config::{CameraConfig, ModeConfig, ViewerConfig};

pub use visualization::frame::{render_frame, BodyFrame, FrameState, PlaybackMode};
pub use visualization::viewer3d::run_3d;
