//! Molecular geometry with resolved element identities.

use basis::element::{self, ElementSymbol};
use basis::{BasisLibrary, BasisSpecification, Shell};
use color_eyre::eyre::{eyre, Result, WrapErr};
use nalgebra::Vector3;
use tracing::debug;

/// 1 Å in bohr.
pub const ANGSTROM_TO_BOHR: f64 = 1.0 / 0.52917721092;

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub symbol: ElementSymbol,
    /// Cartesian position in Å
    pub coords: Vector3<f64>,
}

impl Atom {
    pub fn atomic_number(&self) -> u32 {
        self.symbol.atomic_number()
    }

    pub fn mass(&self) -> Result<f64> {
        let element = self
            .symbol
            .element()
            .ok_or_else(|| eyre!("No periodic table data for {}", self.symbol))?;
        Ok(element.get_atomic_mass() as f64)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    atoms: Vec<Atom>,
}

impl Molecule {
    /// Build a molecule from atomic numbers, aborting on the first one the
    /// registry does not support.
    pub fn from_atomic_numbers(numbers: &[i64], coords: &[Vector3<f64>]) -> Result<Self> {
        check_lengths(numbers.len(), coords.len())?;
        let atoms = numbers
            .iter()
            .zip(coords)
            .enumerate()
            .map(|(idx, (&z, &coords))| {
                let symbol = element::resolve_signed(z)
                    .wrap_err_with(|| format!("Cannot resolve atom {}", idx + 1))?;
                Ok(Atom { symbol, coords })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Molecule { atoms })
    }

    /// Build a molecule from element symbols in any case.
    pub fn from_symbols<S: AsRef<str>>(symbols: &[S], coords: &[Vector3<f64>]) -> Result<Self> {
        check_lengths(symbols.len(), coords.len())?;
        let atoms = symbols
            .iter()
            .zip(coords)
            .enumerate()
            .map(|(idx, (symbol, &coords))| {
                let symbol = element::canonical_symbol(symbol.as_ref())
                    .wrap_err_with(|| format!("Cannot resolve atom {}", idx + 1))?;
                Ok(Atom { symbol, coords })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Molecule { atoms })
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn center_of_mass(&self) -> Result<Vector3<f64>> {
        if self.atoms.is_empty() {
            return Err(eyre!("Center of mass of an empty molecule"));
        }
        let mut total = 0.0;
        let mut weighted = Vector3::zeros();
        for atom in &self.atoms {
            let mass = atom.mass()?;
            total += mass;
            weighted += atom.coords * mass;
        }
        Ok(weighted / total)
    }

    /// One basis record per atom, in atom order.
    pub fn assemble_basis<'a>(
        &self,
        library: &'a BasisLibrary,
        basis_name: &str,
    ) -> Result<Vec<&'a BasisSpecification>> {
        self.atoms
            .iter()
            .map(|atom| {
                library
                    .fetch(atom.symbol, basis_name)
                    .wrap_err("Basis assembly failed")
            })
            .collect()
    }

    /// Shells of every atom centred on its position (in bohr).
    pub fn shells(&self, library: &BasisLibrary, basis_name: &str, pure: bool) -> Result<Vec<Shell>> {
        let records = self.assemble_basis(library, basis_name)?;
        let mut shells = Vec::new();
        for (atom, record) in self.atoms.iter().zip(records) {
            let origin = atom.coords * ANGSTROM_TO_BOHR;
            let atom_shells = record
                .shells(origin, pure)
                .wrap_err_with(|| format!("Invalid {} basis for {}", basis_name, atom.symbol))?;
            debug!("{}: {} shells", atom.symbol, atom_shells.len());
            shells.extend(atom_shells);
        }
        Ok(shells)
    }
}

fn check_lengths(n_atoms: usize, n_coords: usize) -> Result<()> {
    if n_atoms != n_coords {
        return Err(eyre!(
            "Got {} atoms but {} coordinate triples",
            n_atoms,
            n_coords
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn library() -> BasisLibrary {
        BasisLibrary::from_json_str(
            r#"[
            {"basis": "SZV-MOLOPT-GTH", "symbol": "c",
             "coefficients": [[0.4, 0.6], [0.5, 0.5]], "exponents": [3.0, 0.5], "basis_format": [1, 1]},
            {"basis": "SZV-MOLOPT-GTH", "symbol": "o",
             "coefficients": [[0.3, 0.7], [0.6, 0.4]], "exponents": [5.0, 0.9], "basis_format": [1, 1]}
        ]"#,
        )
        .unwrap()
    }

    fn carbon_monoxide() -> Molecule {
        Molecule::from_atomic_numbers(
            &[6, 8],
            &[Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.128)],
        )
        .unwrap()
    }

    #[test]
    fn test_resolves_symbols() {
        let molecule = carbon_monoxide();
        let symbols: Vec<&str> = molecule.atoms().iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["c", "o"]);
        assert_eq!(molecule.atoms()[1].atomic_number(), 8);

        let same = Molecule::from_symbols(&["C", "O"], &[Vector3::zeros(), Vector3::new(0.0, 0.0, 1.128)])
            .unwrap();
        assert_eq!(same, molecule);
    }

    #[test]
    fn test_unsupported_element_aborts_assembly() {
        let err = Molecule::from_atomic_numbers(&[1, 97], &[Vector3::zeros(), Vector3::zeros()])
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<basis::Error>(),
            Some(basis::Error::UnsupportedElement(97))
        ));

        let err = Molecule::from_atomic_numbers(&[-5], &[Vector3::zeros()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<basis::Error>(),
            Some(basis::Error::UnsupportedElement(-5))
        ));

        assert!(Molecule::from_atomic_numbers(&[1, 1], &[Vector3::zeros()]).is_err());
    }

    #[test]
    fn test_center_of_mass() {
        let h2 = Molecule::from_atomic_numbers(
            &[1, 1],
            &[Vector3::new(-0.37, 0.0, 0.0), Vector3::new(0.37, 0.0, 0.0)],
        )
        .unwrap();
        assert_relative_eq!(h2.center_of_mass().unwrap(), Vector3::zeros(), epsilon = 1e-12);

        // Oxygen is heavier: the centre sits closer to it.
        let com = carbon_monoxide().center_of_mass().unwrap();
        assert!(com.z > 0.564 && com.z < 1.128);

        assert!(Molecule::default().center_of_mass().is_err());
    }

    #[test]
    fn test_shells_per_atom() {
        let library = library();
        let molecule = carbon_monoxide();

        let records = molecule.assemble_basis(&library, "szv-molopt-gth").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].symbol(), "o");

        let shells = molecule.shells(&library, "SZV-MOLOPT-GTH", true).unwrap();
        assert_eq!(shells.len(), 4);
        assert_relative_eq!(shells[3].origin.z, 1.128 * ANGSTROM_TO_BOHR, epsilon = 1e-12);
        assert_eq!(basis::shell::n_basis_functions(&shells), 8);
    }

    #[test]
    fn test_missing_basis_is_reported() {
        let molecule = Molecule::from_atomic_numbers(&[7], &[Vector3::zeros()]).unwrap();
        let err = molecule.assemble_basis(&library(), "SZV-MOLOPT-GTH").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<basis::Error>(),
            Some(basis::Error::MissingBasis { .. })
        ));
    }
}
