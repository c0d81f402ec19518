//! Scene preamble written once, before the first molecule of a session.

use super::number::{Real, Vector};
use super::options::RenderOptions;
use crate::geometry::centroid::centroid;
use crate::model::molecule::Molecule;
use std::io::Write;

const GENERATOR: &str = concat!("pov-forge ", env!("CARGO_PKG_VERSION"));

/// Name of the include file defining `Atom_<El>`, `bond_<n>` and `Color_<type>`.
pub const INCLUDE_FILE: &str = "babel_povray3.inc";

const LIGHT_OFFSET: [f64; 3] = [2.0, 3.0, -8.0];
const CAMERA_DISTANCE: f64 = 10.0;
const MIRROR_OFFSET: [f64; 3] = [8.0, -4.0, 8.0];
const MIRROR_RADIUS: f64 = 4.0;
const FLOOR_DROP: f64 = 8.0;

const SKY_SPHERE: &str = "\
// Add some nice sky with clouds
sky_sphere {
    pigment {
      gradient y
      color_map {
        [0.0 1.0 color SkyBlue  color NavyBlue]
      }
      scale 2
      translate -1
    }
    pigment {
      bozo
      turbulence 0.65
      octaves 6
      omega 0.7
      lambda 2
      color_map {
          [0.0 0.1 color rgb <0.85, 0.85, 0.85>
                   color rgb <0.75, 0.75, 0.75>]
          [0.1 0.5 color rgb <0.75, 0.75, 0.75>
                   color rgbt <1, 1, 1, 1>]
          [0.5 1.0 color rgbt <1, 1, 1, 1>
                   color rgbt <1, 1, 1, 1>]
      }
      scale <0.2, 0.5, 0.2>
    }
    rotate -135*x
  }
";

pub fn write_header<W: Write>(
    w: &mut W,
    molecule: &Molecule,
    options: &RenderOptions,
    timestamp: &str,
) -> std::io::Result<()> {
    writeln!(w, "//Povray v3 code generated by {GENERATOR}")?;
    writeln!(w, "//Date: {timestamp}")?;
    writeln!(w)?;

    writeln!(w, "//Set some global parameters for display options")?;
    writeln!(w, "#declare {} = true;", options.model.flag())?;
    writeln!(w, "#declare TRANS = {};", options.transparent)?;
    writeln!(w)?;

    let c = centroid(molecule.positions());

    writeln!(w, "#include \"colors.inc\"")?;
    writeln!(w)?;

    writeln!(w, "// create a regular point light source")?;
    writeln!(w, "light_source {{")?;
    writeln!(w, "  {}", Vector(offset(c, LIGHT_OFFSET)))?;
    writeln!(w, "  color rgb <1,1,1>    // light's color")?;
    writeln!(w, "}}")?;
    writeln!(w)?;

    if options.sky {
        writeln!(w, "{SKY_SPHERE}")?;
    } else {
        writeln!(w, "// set a color of the background (sky)")?;
        writeln!(w, "background {{ color rgb <0.95 0.95 0.95> }}")?;
        writeln!(w)?;
    }

    writeln!(w, "// perspective (default) camera")?;
    writeln!(w, "camera {{")?;
    writeln!(
        w,
        "  location  {}",
        Vector(offset(c, [0.0, 0.0, -CAMERA_DISTANCE]))
    )?;
    writeln!(w, "  look_at   {}", Vector(c))?;
    writeln!(w, "  right     x*image_width/image_height")?;
    writeln!(w, "}}")?;
    writeln!(w)?;

    if options.mirror {
        writeln!(w, "// a mirror sphere")?;
        writeln!(w, "sphere")?;
        writeln!(
            w,
            "{{ {},{}",
            Vector(offset(c, MIRROR_OFFSET)),
            Real(MIRROR_RADIUS)
        )?;
        writeln!(w, "  pigment {{ rgb <0,0,0> }} // A perfect mirror with no color")?;
        writeln!(w, "  finish {{ reflection 1 }} // It reflects all")?;
        writeln!(w, "}}")?;
        writeln!(w)?;
    }

    if options.checkerboard {
        writeln!(w, "// simple Black on White checkerboard... it's a classic")?;
        writeln!(w, "plane {{")?;
        writeln!(w, " -y, {}", Real(-(c[1] - FLOOR_DROP)))?;
        writeln!(w, " pigment {{")?;
        writeln!(w, "  checker color Black color White")?;
        writeln!(w, "  scale 2")?;
        writeln!(w, " }}")?;
        writeln!(w, "}}")?;
        writeln!(w)?;
    }

    writeln!(w, "//Include header for povray")?;
    writeln!(w, "#include \"{INCLUDE_FILE}\"")?;
    writeln!(w)?;

    if !molecule.has_bonds() {
        writeln!(w, "#if (BAS | CST)")?;
        writeln!(w, "#warning \"Molecule without bonds!\"")?;
        writeln!(w, "#warning \"You should do a spacefill-model\"")?;
        writeln!(w, "#end")?;
        writeln!(w)?;
    }

    writeln!(w, "//Use PovRay3.6")?;
    writeln!(w, "#version 3.6;")?;
    writeln!(w)?;

    // Each \b erases one character of the include file's own progress output.
    writeln!(w, "//Print name of molecule while rendering")?;
    writeln!(
        w,
        "#render \"\\b\\b {}\\n\\n\"",
        escape_string(&molecule.title)
    )?;
    writeln!(w)?;

    Ok(())
}

fn offset(base: [f64; 3], delta: [f64; 3]) -> [f64; 3] {
    [base[0] + delta[0], base[1] + delta[1], base[2] + delta[2]]
}

/// Escapes a title for use inside a scene-language string literal.
fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' | '\r' => out.push(' '),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::Atom;
    use crate::model::molecule::Bond;
    use crate::model::types::{BondOrder, Element};
    use crate::scene::options::ModelStyle;

    fn water() -> Molecule {
        let mut mol = Molecule::with_title("water");
        mol.atoms.push(Atom::new(Element::O, [0.0, 0.0, 0.0]));
        mol.atoms.push(Atom::new(Element::H, [0.96, 0.0, 0.0]));
        mol.atoms.push(Atom::new(Element::H, [-0.24, 0.93, 0.0]));
        mol.bonds.push(Bond::new(0, 1, BondOrder::Single));
        mol.bonds.push(Bond::new(0, 2, BondOrder::Single));
        mol
    }

    fn render(mol: &Molecule, options: &RenderOptions) -> String {
        let mut buf = Vec::new();
        write_header(&mut buf, mol, options, "Thu Jan 01 00:00:00 +00:00 2026").expect("header");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn declares_style_and_transparency_flags() {
        let out = render(&water(), &RenderOptions::new(ModelStyle::CappedSticks));
        assert!(out.contains("#declare CST = true;\n"));
        assert!(out.contains("#declare TRANS = false;\n"));

        let out = render(&water(), &RenderOptions::default().transparent(true));
        assert!(out.contains("#declare BAS = true;\n"));
        assert!(out.contains("#declare TRANS = true;\n"));
    }

    #[test]
    fn camera_and_light_are_centroid_relative() {
        let mut mol = Molecule::with_title("pair");
        mol.atoms.push(Atom::new(Element::C, [0.0, 2.0, 4.0]));
        mol.atoms.push(Atom::new(Element::C, [2.0, 2.0, 4.0]));
        let out = render(&mol, &RenderOptions::default());

        assert!(out.contains("light_source {\n  <3,5,-4>\n"));
        assert!(out.contains("  location  <1,2,-6>\n"));
        assert!(out.contains("  look_at   <1,2,4>\n"));
    }

    #[test]
    fn flat_background_unless_sky() {
        let flat = render(&water(), &RenderOptions::default());
        assert!(flat.contains("background { color rgb <0.95 0.95 0.95> }"));
        assert!(!flat.contains("sky_sphere"));

        let sky = render(&water(), &RenderOptions::default().sky(true));
        assert!(sky.contains("sky_sphere {"));
        assert!(!sky.contains("background {"));
    }

    #[test]
    fn optional_mirror_and_checkerboard() {
        let plain = render(&water(), &RenderOptions::default());
        assert!(!plain.contains("// a mirror sphere"));
        assert!(!plain.contains("checker color Black"));

        let mut mol = Molecule::with_title("single");
        mol.atoms.push(Atom::new(Element::Ne, [1.0, 1.0, 1.0]));
        let decorated = render(
            &mol,
            &RenderOptions::default().mirror(true).checkerboard(true),
        );
        assert!(decorated.contains("{ <9,-3,9>,4\n"));
        assert!(decorated.contains(" -y, 7\n"));
    }

    #[test]
    fn bond_free_molecule_gets_spacefill_advice() {
        let mut mol = Molecule::with_title("argon");
        mol.atoms.push(Atom::new(Element::Ar, [0.0, 0.0, 0.0]));
        let out = render(&mol, &RenderOptions::default());
        assert!(out.contains("#if (BAS | CST)\n#warning \"Molecule without bonds!\"\n"));

        let out = render(&water(), &RenderOptions::default());
        assert!(!out.contains("#warning"));
    }

    #[test]
    fn include_version_and_title() {
        let out = render(&water(), &RenderOptions::default());
        assert!(out.contains("#include \"babel_povray3.inc\"\n"));
        assert!(out.contains("#version 3.6;\n"));
        assert!(out.contains("#render \"\\b\\b water\\n\\n\"\n"));
        assert!(out.contains("//Date: Thu Jan 01 00:00:00 +00:00 2026\n"));
    }

    #[test]
    fn title_quotes_are_escaped() {
        assert_eq!(escape_string(r#"say "hi"\"#), r#"say \"hi\"\\"#);
        assert_eq!(escape_string("two\nlines"), "two lines");
    }
}
