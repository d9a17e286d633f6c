mod detector;

pub use detector::IDetector;
