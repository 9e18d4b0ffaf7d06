pub mod page_service;
pub mod link_service;

pub use page_service::PageService;
pub use link_service::LinkService;
