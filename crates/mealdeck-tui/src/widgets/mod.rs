//! Custom widget components

mod category_detail;
mod category_list;
mod filter_input;
mod header;
mod image_view;
mod key_hints;
mod meal_detail;
mod row_list;

pub use category_detail::{CategoryDetailPane, LOADING_MEALS};
pub use category_list::CategoryBrowser;
pub use filter_input::{split_for_filter, FilterInput};
pub use header::MainHeader;
pub use image_view::ImageView;
pub use key_hints::KeyHints;
pub use meal_detail::{MealDetailPane, WATCH_ON_YOUTUBE};
pub use row_list::{truncate_to_width, RowList};
