mod service;

pub use service::ReportQueryService;
