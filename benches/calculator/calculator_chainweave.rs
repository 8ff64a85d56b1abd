use chainweave::cookbook::ch_2_calculator::evaluate;

pub fn chainweave_parser(s: &str) -> Vec<f64> {
    evaluate(s).unwrap_or_default()
}
