use linecalc::tool::Statistics;

fn main() {
    linecalc::cli::main::<Statistics>();
}
