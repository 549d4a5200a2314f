use gol_bounded::*;

fn main() {
    // updating one random grid of each size with every engine
    let engines: Vec<Box<dyn GoLEngine>> = vec![Box::new(NeighborEngine), Box::new(RowEngine)];
    for size in [64, 256, 1024] {
        let cells = seeds::random(size, size, 0.3, Some(42)).unwrap();
        let grid = Grid::new(size, size, cells).unwrap();
        println!("size={size}\tpopulation={}", grid.population());

        let mut results = vec![];
        for engine in engines.iter() {
            let timer = std::time::Instant::now();
            let updated = engine.advance(&grid, 16);
            let elapsed = timer.elapsed();
            println!("{} -> {:?}", engine.name(), elapsed.as_secs_f64());
            results.push(updated);
        }
        assert!(results.windows(2).all(|w| w[0] == w[1]), "Engines disagree");
    }
}
