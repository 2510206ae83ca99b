use log::{error, info};
use sexpr::{list, Evaluator};

fn main() {
    pretty_env_logger::init();

    let inner = list!["+", 3, 2];
    let mut expr = list!["+", 3, 2];
    if let Some(list) = expr.as_list_mut() {
        list.push(inner);
    }
    println!("{}", expr);

    let evaluator = Evaluator::new();
    info!("evaluating with a nesting limit of {}", evaluator.max_depth());
    match evaluator.eval(&expr) {
        Ok(result) => println!("{}", result),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
