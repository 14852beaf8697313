pub mod system;

const B: &str = "B";

const K: &str = "k";
const M: &str = "M";
const G: &str = "G";
const T: &str = "T";
const P: &str = "P";
const E: &str = "E";
const Z: &str = "Z";

const KI: &str = "Ki";
const MI: &str = "Mi";
const GI: &str = "Gi";
const TI: &str = "Ti";
const PI: &str = "Pi";
const EI: &str = "Ei";
const ZI: &str = "Zi";

const Y: &str = "Y";
