// File: crates/plot-examples/src/bin/distribute.rs
// Summary: Minimal example that expands bracketed expressions term by term.

use plot_core::term::{distribute, multiply, parse_expression, Op};

fn main() {
    // The worked example every distributive-law page opens with.
    println!("3(x + 2)  =  {}", distribute(3, &["x", "2"], Op::Add));
    println!("3(2x + -5)  =  {}", distribute(3, &["2x", "-5"], Op::Add));
    println!("-2(4a - 3)  =  {}", distribute(-2, &["4a", "3"], Op::Sub));

    // Step-by-step view of a single expansion.
    let expr = "2x - 5";
    let terms = parse_expression(expr);
    println!();
    println!("expanding 3({expr}):");
    for term in &terms {
        let t = term.to_string();
        println!("  3 * {t} = {}", multiply(&t, 3));
    }
}
