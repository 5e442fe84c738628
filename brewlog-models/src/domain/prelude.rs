pub use crate::domain::{
    bean::{BeanListParams, CoffeeBeanInfo, CoffeeBeanPayload},
    common::{PageParams, PageResult, PathId},
    equipment::{EquipmentInfo, EquipmentListParams, EquipmentPayload},
    grind::{GrindSettingInfo, GrindSettingListParams, GrindSettingPayload},
    session::{BrewSessionInfo, BrewSessionListParams, BrewSessionPayload},
};
