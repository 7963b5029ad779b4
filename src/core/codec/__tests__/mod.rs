mod encoder_test;
mod normalize_test;
