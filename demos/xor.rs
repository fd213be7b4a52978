use nnl::{xor_samples, Network};

fn main() {
    let mut network = Network::new(2, 4, 1, 0.5);
    let samples = xor_samples();
    let steps = 40_000;

    for step in 0..steps {
        let sample = &samples[step % samples.len()];
        if let Err(e) = network.train(&sample.input, &sample.target) {
            eprintln!("training failed: {e}");
            return;
        }
        if step % 10_000 == 0 {
            let mse = nnl::train::mean_squared_error(&network, &samples).unwrap_or(f32::NAN);
            println!("Step {step}: mse = {mse:.6}");
        }
    }

    for sample in &samples {
        match network.feed(&sample.input) {
            Ok(output) => println!("Input: {:?} -> Output: {:.4}", sample.input, output[0]),
            Err(e) => eprintln!("feed failed: {e}"),
        }
    }
}
