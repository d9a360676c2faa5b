pub mod logging;
pub use logging::{
    FileLogger, StdoutLogger, init_file_logger, init_logger_from_env, init_stdout_logger,
};

mod rect;
pub use rect::*;

mod tensor;
pub use tensor::*;

mod vec2;
pub use vec2::*;

// downstream crates log through base::log
pub use log;
