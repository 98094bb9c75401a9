use std::io::Write;

use crate::error::Result;
use crate::walk::Instance;

/// Writes `instance` in DIMACS CNF: a `p cnf` header, then one clause per
/// line as 1-based signed variables terminated by `0`.
pub fn write_dimacs<W: Write>(instance: &Instance, mut out: W) -> Result<()> {
    writeln!(out, "p cnf {} {}", instance.variables(), instance.len())?;
    for clause in instance.iter() {
        for lit in clause.iter() {
            let var = lit.variable as i64 + 1;
            write!(out, "{} ", if lit.polarity { var } else { -var })?;
        }
        writeln!(out, "0")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::evil_3sat_instance;

    #[test]
    fn header_and_first_clauses() {
        let mut buf = Vec::new();
        write_dimacs(&evil_3sat_instance(4).unwrap(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "p cnf 4 11");
        assert_eq!(lines[1], "-1 2 3 0");
        assert_eq!(lines[8], "2 3 -4 0");
        assert_eq!(lines.len(), 12);
    }
}
