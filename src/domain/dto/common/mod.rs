//! 공통 DTO 모듈
//!
//! 도메인과 무관하게 모든 API가 공유하는 응답 봉투와 페이지네이션 타입입니다.

pub mod message;
pub mod page;

pub use message::Message;
pub use page::{Page, PageRequest};
