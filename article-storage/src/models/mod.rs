mod article;
mod page;

pub use article::Article;
pub(crate) use article::to_db_timestamp;
pub use page::Page;
