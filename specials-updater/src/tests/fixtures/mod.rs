use std::fs;
use std::path::Path;

/// Load test HTML fixture by name
pub fn load_html_fixture(fixture_name: &str) -> String {
    let path = Path::new("src/tests/fixtures").join(format!("{}.html", fixture_name));
    fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Failed to load test fixture: {}", fixture_name))
}

pub const POST_IMAGE_1: &str =
    "https://scontent.fjnb1-2.fna.fbcdn.net/v/t39.30808-6/411111111_n.jpg?_nc_cat=100&ccb=1-7&oh=01";
pub const POST_IMAGE_2: &str =
    "https://scontent.fjnb1-2.fna.fbcdn.net/v/t39.30808-6/422222222_n.jpg?_nc_cat=101&ccb=1-7&oh=02";
pub const POST_IMAGE_3: &str =
    "https://scontent.fjnb1-2.fna.fbcdn.net/v/t39.30808-6/433333333_n.jpg?_nc_cat=102&ccb=1-7&oh=03";
pub const POST_IMAGE_4: &str =
    "https://scontent.fjnb1-2.fna.fbcdn.net/v/t39.30808-6/444444444_n.jpg?_nc_cat=103&ccb=1-7&oh=04";
