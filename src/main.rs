fn main() -> Result<(), Box<dyn std::error::Error>> {
    let presenter = mandelbrot_explorer::PpmFilePresenter::new();
    let mut controller = mandelbrot_explorer::ExplorerController::new(presenter)?;

    controller.explore()?;
    controller.write("output")?;

    Ok(())
}
