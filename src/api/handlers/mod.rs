pub mod weather;

use crate::repositories::WeatherRepository;

#[derive(Clone)]
pub struct AppState {
    pub repository: WeatherRepository,
}
