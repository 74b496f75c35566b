use gol_sparse::{iterate, patterns};

const STEPS: u32 = 256;

fn main() {
    env_logger::init();

    let timer = std::time::Instant::now();
    let soup = patterns::random_soup(64, 64, 0.3, Some(42)).unwrap();
    println!("Time on building soup: {:?}", timer.elapsed());

    let timer = std::time::Instant::now();
    let run = iterate(soup, STEPS);
    println!("Time on {} steps: {:?}", STEPS, timer.elapsed());

    assert_eq!(run.len(), STEPS as usize + 1);
    let last = &run[run.len() - 1];
    println!(
        "final population: {} in {:?}",
        last.population(),
        last.corners()
    );
}
