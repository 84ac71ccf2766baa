//! ELP2000-82B planetary perturbations, table 2, distance (ELP18).
//!
//! 114 terms. Multiplier columns follow [`PLANETARY_TABLE2_COLUMNS`]:
//! Me, V, EMB, Ma, J, S, U, D, l', l, F. Phases in degrees, amplitudes in
//! kilometres, periods in years (`99999.999` marks the secular term).
//!
//! Source: Chapront-Touzé & Chapront, ELP2000-82B, file ELP18.
//! Literals are kept digit-for-digit; do not reformat.
//!
//! [`PLANETARY_TABLE2_COLUMNS`]: crate::term::PLANETARY_TABLE2_COLUMNS

use crate::term::PlanetPert;

/// Number of terms in [`ELP18`].
pub const ELP18_SIZE: usize = 114;

/// Planetary perturbation series for the Earth-Moon distance.
#[rustfmt::skip]
pub static ELP18: [PlanetPert; ELP18_SIZE] = [
    //                Me    V  EMB   Ma    J    S    U    D   l'    l    F        phase      ampl        period
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0],  270.000000, 0.027020, 99999.999000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   2],  270.000300, 0.000040,     0.037000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   0,   0,   1,  -2],   89.999620, 0.000100,     0.074000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   0,   0,   1,   0],   89.997520, 0.010350,     0.075000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   0,   0,   2,   0],   90.000070, 0.000530,     0.038000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   0,   0,   3,   0],   89.999790, 0.000030,     0.025000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   0,   1,  -2,   0],  245.887100, 0.000070,     0.039000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   0,   1,  -1,   0],  244.233790, 0.001260,     0.082000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   0,   1,   1,   0],   64.429400, 0.001120,     0.070000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   0,   1,   2,   0],   65.901690, 0.000060,     0.036000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   1,  -1,  -1,   0],  114.155070, 0.000030,     0.530000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   1,  -1,   0,   0],  294.141830, 0.000250,     0.088000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   1,   0,   0,   0],  261.052170, 0.000020,     0.081000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   1,   1,  -2,   0],   66.292360, 0.000030,     0.076000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   1,   1,  -1,   0],   65.777390, 0.000080,     8.850000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   1,   1,   0,   0],  245.786310, 0.001470,     0.075000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   1,   1,   1,   0],  245.844950, 0.000080,     0.038000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   2,  -2,   0,   0],  114.064750, 0.000030,     0.044000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   2,  -1,  -1,   0],  301.712510, 0.000290,     0.095000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   2,  -1,   0,   0],  105.063900, 0.000220,     0.042000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   2,   0,  -2,   0],  270.000210, 0.000220,     0.564000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   2,   0,  -1,  -2],   89.999750, 0.000020,     0.065000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   2,   0,  -1,   0],   90.094720, 0.001660,     0.087000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   2,   0,   0,  -2],   89.999740, 0.000020,     0.474000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   2,   0,   0,   0],   89.730460, 0.000570,     0.040000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   2,   0,   1,   0],   90.000030, 0.000070,     0.026000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   2,   1,  -2,   0],   65.876750, 0.000040,     1.292000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   2,   1,  -1,   0],  246.392670, 0.000510,     0.080000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   2,   1,   0,   0],   63.779870, 0.000100,     0.039000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   2,   2,  -1,   0],   66.003910, 0.000230,     0.074000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   4,   0,  -2,   0],   89.999260, 0.000020,     0.044000),
    PlanetPert::new([  0,   0,   0,   0,   0,   0,   0,   4,   0,  -1,   0],   90.000010, 0.000020,     0.028000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -3,   0,   0,  -1],  185.136030, 0.000030,     0.020000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -3,   0,   0,   1],  185.132160, 0.000080,     0.044000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -3,   0,   1,  -1],    5.132270, 0.000020,     0.028000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -3,   0,   1,   1],  185.132510, 0.000040,     0.106000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -3,   0,   2,  -1],    5.133520, 0.000070,     0.043000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -2,   0,   0,   0],  166.994390, 0.000040,     0.042000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -2,   0,   0,   1],    5.132280, 0.000030,     0.097000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -2,   0,   1,   0],  167.073450, 0.000020,     0.095000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -1,  -1,   0,  -1],    5.136660, 0.000030,     0.039000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -1,  -1,   0,   1],  185.132280, 0.000020,     0.949000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -1,   0,  -2,  -1],  185.134700, 0.000070,     0.019000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -1,   0,  -2,   1],    5.131420, 0.000070,     0.041000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -1,   0,  -1,  -1],  185.134980, 0.000660,     0.026000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -1,   0,  -1,   1],    5.131380, 0.001010,     0.089000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -1,   0,   0,  -1],  185.136030, 0.003280,     0.040000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -1,   0,   0,   1],    5.132370, 0.001490,     0.487000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -1,   0,   1,  -1],    5.133430, 0.006480,     0.087000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -1,   0,   1,   1],    5.132170, 0.001330,     0.065000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -1,   0,   2,  -1],  185.134140, 0.001100,     0.581000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -1,   0,   2,   1],    5.132280, 0.000070,     0.035000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -1,   0,   3,  -1],  185.134340, 0.000100,     0.067000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -1,   1,  -1,  -1],  185.135050, 0.000050,     0.027000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -1,   1,  -1,   1],    5.131420, 0.000050,     0.098000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -1,   1,   0,  -1],  185.136100, 0.000220,     0.042000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -1,   1,   0,   1],    5.132280, 0.000100,     0.327000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -1,   1,   1,  -1],    5.133540, 0.000250,     0.095000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -1,   1,   1,   1],    5.132280, 0.000050,     0.061000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,  -1,   1,   2,  -1],  185.134330, 0.000040,     0.368000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   0,   0,  -1,   0],  165.969050, 0.000020,     0.082000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   0,   0,   0,  -1],  185.130430, 0.000140,     0.081000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   0,   0,   0,   1],  185.132280, 0.000120,     0.069000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   0,   0,   1,  -1],    5.133340, 0.000030,     1.200000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   0,   0,   1,   0],  345.969050, 0.000020,     0.070000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,  -1,  -2,  -1],    5.134930, 0.000030,     0.036000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,  -1,  -1,  -1],    5.135440, 0.000210,     0.070000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,  -1,  -1,   1],  185.133860, 0.000020,     0.080000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,  -1,   0,  -1],  185.132270, 0.000040,     0.949000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,  -1,   0,   1],  185.132280, 0.000030,     0.039000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,  -1,   1,  -1],    5.134040, 0.000460,     0.082000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,  -1,   2,  -1],    5.134270, 0.000040,     0.039000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,   0,  -3,  -1],  185.134560, 0.000190,     0.025000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,   0,  -2,  -1],  185.134590, 0.003110,     0.038000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,   0,  -2,   1],  185.131930, 0.000820,     3.575000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,   0,  -1,  -1],  185.134590, 0.057030,     0.075000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,   0,  -1,   1],    5.131900, 0.014470,     0.074000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,   0,   0,  -1],  185.129890, 0.001830,    18.600000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,   0,   0,   1],  185.133090, 0.000350,     0.037000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,   0,   1,  -3],  185.135040, 0.000100,     0.073000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,   0,   1,  -1],    5.134530, 0.057650,     0.076000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,   0,   2,  -1],    5.134530, 0.003140,     0.038000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,   0,   3,  -1],    5.134560, 0.000190,     0.025000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,   1,  -2,  -1],  185.134940, 0.000030,     0.039000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,   1,  -1,  -1],  185.135590, 0.000250,     0.081000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,   1,  -1,   1],    5.133040, 0.000040,     0.069000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,   1,   0,  -1],  185.132270, 0.000040,     1.057000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,   1,   0,   1],  185.132280, 0.000020,     0.036000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,   1,   1,  -1],  185.134020, 0.000370,     0.070000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   1,   1,   2,  -1],  185.134280, 0.000040,     0.036000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   2,   0,   0,  -1],  185.133190, 0.000270,     0.081000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   2,   0,   1,  -1],  185.133870, 0.000030,     0.039000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   2,   1,   0,  -1],    5.132290, 0.000040,     0.075000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   3,  -1,  -2,  -1],    5.134330, 0.000040,     0.354000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   3,  -1,  -1,  -1],  185.134380, 0.000150,     0.096000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   3,  -1,   0,  -1],    5.134690, 0.000350,     0.042000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   3,  -1,   1,  -1],    5.134570, 0.000060,     0.027000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   3,   0,  -3,  -1],    5.134510, 0.000090,     0.066000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   3,   0,  -2,  -1],    5.134560, 0.000910,     0.547000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   3,   0,  -2,   1],    5.131870, 0.000140,     0.040000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   3,   0,  -1,  -1],  185.134560, 0.003510,     0.088000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   3,   0,  -1,   1],    5.131830, 0.000110,     0.026000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   3,   0,   0,  -1],    5.134690, 0.005030,     0.041000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   3,   0,   1,  -1],    5.134620, 0.000760,     0.026000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   3,   0,   2,  -1],    5.134700, 0.000070,     0.020000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   3,   1,  -1,  -1],    5.133210, 0.000050,     0.080000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   3,   1,   0,  -1],  185.134510, 0.000060,     0.039000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   5,   0,  -2,  -1],  185.134450, 0.000040,     0.044000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   5,   0,  -1,  -1],    5.132270, 0.000020,     0.028000),
    PlanetPert::new([  0,   0,   1,   0,   0,   0,   0,   5,   0,   0,  -1],    5.134720, 0.000040,     0.020000),
    PlanetPert::new([  0,   8, -13,   0,   0,   0,   0,  -2,   0,   0,   0],  324.685940, 0.000030,     0.040000),
    PlanetPert::new([  0,   8, -13,   0,   0,   0,   0,   0,   0,  -1,   0],  324.677090, 0.000030,     0.075000),
    PlanetPert::new([  0,   8, -13,   0,   0,   0,   0,   0,   0,   1,   0],  144.677090, 0.000030,     0.075000),
    PlanetPert::new([  0,   8, -13,   0,   0,   0,   0,   2,   0,   0,   0],  144.686110, 0.000030,     0.040000),
];

