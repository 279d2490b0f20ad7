fn main() {
    assess_perf_test_simple::app::cli::run();
}
