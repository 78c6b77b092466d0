//! Emitter for the `.qc` gate list format.

use alsvid_ir::{Circuit, Gate};

/// Emit a circuit as `.qc` source, one gate per line.
pub fn emit(circuit: &Circuit) -> String {
    let mut out = String::new();
    for gate in circuit {
        let line = match *gate {
            Gate::Not(a) => format!("NOT {}", a.0),
            Gate::Cnot(c, a) => format!("CNOT {} {}", c.0, a.0),
            Gate::Toffoli(c1, c2, a) => format!("TOFF {} {} {}", c1.0, c2.0, a.0),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}
