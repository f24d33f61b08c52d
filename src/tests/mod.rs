mod codec_test;
mod scenario_test;
