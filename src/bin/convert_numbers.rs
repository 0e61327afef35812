use linecalc::tool::NumberConversion;

fn main() {
    linecalc::cli::main::<NumberConversion>();
}
