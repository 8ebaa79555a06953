use serde::{Deserialize, Serialize};

macro_rules! nutrient_vector {
    ($($key:ident),* $(,)?) => {
        /// Fixed-shape nutrient totals or targets.
        ///
        /// Every key is always present; a nutrient that was never touched is
        /// simply 0.0. Being a plain struct (rather than a map) is what keeps
        /// sparse vectors from ever escaping the aggregator.
        #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
        pub struct NutrientVector {
            $(
                #[serde(default)]
                pub $key: f64,
            )*
        }

        impl NutrientVector {
            /// Every nutrient key, in serialization order.
            pub const KEYS: &'static [&'static str] = &[$(stringify!($key)),*];

            pub fn zero() -> Self {
                Self::default()
            }

            /// Value for a nutrient key, `None` for an unknown key.
            pub fn get(&self, key: &str) -> Option<f64> {
                match key {
                    $(stringify!($key) => Some(self.$key),)*
                    _ => None,
                }
            }

            pub fn get_mut(&mut self, key: &str) -> Option<&mut f64> {
                match key {
                    $(stringify!($key) => Some(&mut self.$key),)*
                    _ => None,
                }
            }

            /// Accumulate `other` scaled by `factor` into `self`.
            pub fn add_scaled(&mut self, other: &NutrientVector, factor: f64) {
                $(self.$key += other.$key * factor;)*
            }
        }

        impl std::ops::AddAssign<&NutrientVector> for NutrientVector {
            fn add_assign(&mut self, rhs: &NutrientVector) {
                $(self.$key += rhs.$key;)*
            }
        }
    };
}

nutrient_vector!(
    calories,
    protein,
    carbs,
    fat,
    saturated_fat,
    unsaturated_fat,
    polyunsaturated_fat,
    fiber,
    sugar,
    water,
    vitamin_a,
    vitamin_c,
    vitamin_d,
    vitamin_e,
    vitamin_k,
    vitamin_b6,
    vitamin_b12,
    thiamine,
    riboflavin,
    niacin,
    sodium,
    calcium,
    iron,
    magnesium,
    potassium,
    zinc,
    phosphorus,
    chloride,
    sulfur,
    iodine,
    copper,
    chromium,
    manganese,
    selenium,
    fluoride,
    molybdenum,
    cobalt,
);

impl std::ops::Add for NutrientVector {
    type Output = NutrientVector;

    fn add(mut self, rhs: NutrientVector) -> NutrientVector {
        self += &rhs;
        self
    }
}
