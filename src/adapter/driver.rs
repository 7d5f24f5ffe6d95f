// 駆動する側アダプター（購入リクエストの受け口）

pub mod command_line;
pub mod request_dto;
pub mod response_dto;

pub use command_line::CommandLineDriver;
