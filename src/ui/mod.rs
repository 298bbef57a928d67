pub mod notice;

pub use notice::{ConsoleNotice, NoticeDialog, TerminalNotice};
