pub mod weather;

pub use weather::{NewWeatherReading, WeatherReading, WeatherRepository};
