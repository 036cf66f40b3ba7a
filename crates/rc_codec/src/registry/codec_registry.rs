use core::any::TypeId;
use core::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, warn};
use rc_utils::TypeIdMap;

use crate::info::{TypeInfo, Typed};
use crate::registry::builder::PlanBuilder;
use crate::registry::builtin::builtin_scalars;
use crate::registry::decode::Decoder;
use crate::registry::encode::Encoder;
use crate::registry::plan::RecordPlan;
use crate::registry::ScalarCodec;
use crate::{Codable, CodecError, TreeValue, TypeDescriptor};

// -----------------------------------------------------------------------------
// CodecRegistry

/// Scalar codecs and derived record decode plans.
///
/// Scalar codecs are configured up front through `&mut self`. Record plans are
/// derived lazily through `&self`, so a registry can be shared between threads
/// once configured.
///
/// # Example
///
/// ```
/// use rc_codec::{CodecRegistry, derive::Codable};
/// use serde_json::json;
///
/// #[derive(Codable, Debug, PartialEq)]
/// struct Visit {
///     id: uuid::Uuid,
///     at: chrono::DateTime<chrono::Utc>,
/// }
///
/// let registry = CodecRegistry::new();
///
/// let tree = json!({
///     "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
///     "at": "2021-04-23T09:05:16.157Z",
/// });
/// let visit: Visit = registry.decode(&tree).unwrap();
/// assert_eq!(registry.encode(&visit).unwrap(), tree);
/// ```
pub struct CodecRegistry {
    scalars: TypeIdMap<ScalarCodec>,
    plans: RwLock<TypeIdMap<RecordPlan>>,
}

impl Default for CodecRegistry {
    /// See [`CodecRegistry::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl CodecRegistry {
    /// Create a registry without any scalar codec.
    ///
    /// Types with a native codec, such as `String` or `i64`, still work.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            scalars: TypeIdMap::new(),
            plans: RwLock::new(TypeIdMap::new()),
        }
    }

    /// Create a registry with the built-in scalar codecs.
    ///
    /// - `Uuid`: hyphenated lowercase text
    /// - `BigDecimal`: decimal text
    /// - `NaiveDate`, `NaiveTime`, `NaiveDateTime`: ISO-8601 text
    /// - `DateTime<Utc>`, `DateTime<FixedOffset>`: RFC 3339 text, `Z` for UTC
    /// - [`TimeOfDay`](crate::format::TimeOfDay): ISO-8601 time text
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for codec in builtin_scalars() {
            registry.register_scalar_codec(codec);
        }
        registry
    }

    #[inline]
    fn read_plans(&self) -> RwLockReadGuard<'_, TypeIdMap<RecordPlan>> {
        self.plans.read().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    fn write_plans(&self) -> RwLockWriteGuard<'_, TypeIdMap<RecordPlan>> {
        self.plans.write().unwrap_or_else(PoisonError::into_inner)
    }

    // -------------------------------------------------------------------------
    // Scalars

    /// Registers a scalar codec for `T`, replacing any previous one.
    ///
    /// Record plans derived before the call keep the decoder they were
    /// derived with.
    ///
    /// # Example
    ///
    /// ```
    /// use rc_codec::{CodecError, CodecRegistry, TreeValue};
    /// use serde_json::json;
    ///
    /// let mut registry = CodecRegistry::new();
    /// registry.register_scalar::<bool>(
    ///     |flag| Ok(json!(if *flag { "yes" } else { "no" })),
    ///     |tree| match tree.as_str() {
    ///         Some("yes") => Ok(true),
    ///         Some("no") => Ok(false),
    ///         _ => Err(CodecError::coercion("bool", "expected yes or no")),
    ///     },
    /// );
    ///
    /// assert_eq!(registry.encode(&true).unwrap(), json!("yes"));
    /// assert!(!registry.decode::<bool>(&json!("no")).unwrap());
    /// ```
    pub fn register_scalar<T: Typed>(
        &mut self,
        encode: impl Fn(&T) -> Result<TreeValue, CodecError> + Send + Sync + 'static,
        decode: impl Fn(&TreeValue) -> Result<T, CodecError> + Send + Sync + 'static,
    ) {
        self.register_scalar_codec(ScalarCodec::new(encode, decode));
    }

    /// Registers a prepared scalar codec, replacing any previous one for its type.
    pub fn register_scalar_codec(&mut self, codec: ScalarCodec) {
        let ty = codec.ty();
        if self.scalars.insert(ty.id(), codec).is_some() {
            warn!("scalar codec for `{ty}` was replaced");
        }
    }

    /// Returns the scalar codec registered for the type.
    #[inline]
    pub fn get_scalar(&self, type_id: TypeId) -> Option<&ScalarCodec> {
        self.scalars.get(&type_id)
    }

    #[inline]
    pub fn contains_scalar(&self, type_id: TypeId) -> bool {
        self.scalars.contains(&type_id)
    }

    // -------------------------------------------------------------------------
    // Records

    /// Derives and caches the decode plan of `T` and of every record reachable
    /// from its fields.
    ///
    /// Registering a registered record does nothing. On error nothing is cached.
    #[inline]
    pub fn register_record<T: Typed>(&self) -> Result<(), CodecError> {
        self.register_record_info(T::type_info())
    }

    /// See [`CodecRegistry::register_record`].
    pub fn register_record_info(&self, info: &'static TypeInfo) -> Result<(), CodecError> {
        self.derive(|builder| builder.record(info).map(|_| ()))
    }

    /// Returns `true` if a decode plan of the record is cached.
    #[inline]
    pub fn contains_record(&self, type_id: TypeId) -> bool {
        self.read_plans().contains(&type_id)
    }

    /// Returns the number of cached record plans.
    #[inline]
    pub fn record_count(&self) -> usize {
        self.read_plans().len()
    }

    /// Registers every record declared with `#[codec(auto_register)]`.
    ///
    /// Returns the number of records found. Without the `auto_register`
    /// feature this does nothing.
    pub fn auto_register(&self) -> Result<usize, CodecError> {
        #[cfg(feature = "auto_register")]
        {
            crate::__macro_exports::auto_register::__register_records(self)
        }
        #[cfg(not(feature = "auto_register"))]
        {
            Ok(0)
        }
    }

    // Runs a derivation against the published plans.
    //
    // A probe under the read lock is enough when every record it reaches is
    // published. Otherwise the derivation runs under the write lock, which
    // serializes concurrent derivations: the second one finds the plans the
    // first one published.
    fn derive<R>(
        &self,
        derive: impl Fn(&mut PlanBuilder<'_>) -> Result<R, CodecError>,
    ) -> Result<R, CodecError> {
        {
            let plans = self.read_plans();
            let mut probe = PlanBuilder::probe(&self.scalars, &plans);
            let result = derive(&mut probe)?;
            if probe.is_complete() {
                return Ok(result);
            }
        }

        let mut plans = self.write_plans();
        let mut builder = PlanBuilder::new(&self.scalars, &plans);
        let result = derive(&mut builder)?;
        let staged = builder.finish();
        if !staged.is_empty() {
            debug!("published {} record decode plan(s)", staged.len());
            plans.extend(staged);
        }
        Ok(result)
    }

    // -------------------------------------------------------------------------
    // Decode

    /// Decodes a tree value as `T`.
    ///
    /// Records reached through `T` are registered on the way.
    #[inline]
    pub fn decode<T: Typed>(&self, tree: &TreeValue) -> Result<T, CodecError> {
        T::take_from(self.decode_dyn(T::type_info(), tree)?)
    }

    /// Decodes a tree value as the type described by `info`.
    pub fn decode_dyn(&self, info: &'static TypeInfo, tree: &TreeValue) -> Result<Box<dyn Codable>, CodecError> {
        let descriptor = TypeDescriptor::resolve(info)?;
        let plan = self.derive(|builder| builder.plan(&descriptor))?;
        Decoder::new(&self.read_plans()).decode(&plan, tree)
    }

    /// Parses JSON text and decodes it as `T`.
    ///
    /// Malformed text fails with [`ErrorKind::Syntax`](crate::ErrorKind::Syntax).
    pub fn from_json<T: Typed>(&self, text: &str) -> Result<T, CodecError> {
        let tree: TreeValue = serde_json::from_str(text).map_err(CodecError::syntax)?;
        self.decode(&tree)
    }

    // -------------------------------------------------------------------------
    // Encode

    /// Encodes a value by its runtime type.
    ///
    /// Needs no registration: records are encoded through their own info.
    #[inline]
    pub fn encode(&self, value: &dyn Codable) -> Result<TreeValue, CodecError> {
        Encoder::new(&self.scalars).encode(value)
    }

    /// Encodes a value as compact JSON text.
    pub fn to_json(&self, value: &dyn Codable) -> Result<String, CodecError> {
        serde_json::to_string(&self.encode(value)?).map_err(CodecError::syntax)
    }

    /// Encodes a value as indented JSON text.
    pub fn to_json_pretty(&self, value: &dyn Codable) -> Result<String, CodecError> {
        serde_json::to_string_pretty(&self.encode(value)?).map_err(CodecError::syntax)
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("scalars", &self.scalars.len())
            .field("records", &self.record_count())
            .finish()
    }
}
