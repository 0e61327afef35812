use linecalc::tool::WordCount;

fn main() {
    linecalc::cli::main::<WordCount>();
}
