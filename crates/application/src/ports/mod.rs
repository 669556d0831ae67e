//! Port definitions for external collaborators

mod inference_port;
mod secret_store;
mod weather_port;

pub use inference_port::{InferencePort, InferenceResult};
pub use secret_store::{OPENAI_API_KEY_SECRET, OPENWEATHER_API_KEY_SECRET, SecretStorePort};
pub use weather_port::{CurrentConditions, Units, WeatherPort};

#[cfg(test)]
pub use inference_port::MockInferencePort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
