use crate::core::data::raster::Raster;
use std::io::Write;
use std::path::Path;

pub fn write_ppm(raster: &Raster, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", raster.width(), raster.height())?;
    writeln!(file, "255")?;
    file.write_all(raster.data())?;

    Ok(())
}
